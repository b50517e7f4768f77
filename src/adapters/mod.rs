pub mod recgov;
