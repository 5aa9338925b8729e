pub mod play_nine;
