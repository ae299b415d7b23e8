pub mod compare;
pub mod dispatch;
pub mod traverse;
