// Adapters layer: concrete key-value stores backing the cart snapshot.

pub mod storage;
