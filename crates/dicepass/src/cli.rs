pub mod dicepass;
