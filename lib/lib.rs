/// Game domain abstractions.
pub mod game;
/// Static position evaluation.
pub mod eval;
/// The m,n,k family of connection games.
pub mod mnk;
/// Minimax searching algorithm.
pub mod search;
/// Assorted utilities.
pub mod util;
