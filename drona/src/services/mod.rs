mod tutor;

pub use tutor::{Solved, TutorService};
