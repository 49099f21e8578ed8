pub mod d100_client_insights;
