pub mod a001_skip;
