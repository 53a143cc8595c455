pub mod bonding;
