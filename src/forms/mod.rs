pub mod donate;
