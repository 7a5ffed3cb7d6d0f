pub mod d400_store_stats;
