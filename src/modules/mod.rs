pub mod rcfa;
