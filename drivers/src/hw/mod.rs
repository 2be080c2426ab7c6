pub mod n64;
