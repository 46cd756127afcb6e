mod chesscom;

pub(crate) use chesscom::ChessComClient;
