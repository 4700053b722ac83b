pub mod add;
pub mod check;
pub mod done;
pub mod next;
pub mod search;
