pub mod fscore;
