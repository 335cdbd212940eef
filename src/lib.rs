//! `ordtree`: ordered-set containers over plain, AVL, and Red-Black
//! binary search trees, sharing one generic algorithm kernel (`kernel`)
//! across two node representations (`store`), plus a differential fuzzer
//! (`fuzz`) that validates each against a reference `HashSet` oracle.

pub mod accessor;
pub mod error;
pub mod fuzz;
pub mod kernel;
pub mod render;
pub mod sets;
pub mod store;
pub mod validate;

pub use accessor::{Accessor, Color, Dir};
pub use error::{FuzzCause, FuzzFailure, FuzzMismatchError, ValidationError};
pub use fuzz::{fuzz_epochs, fuzz_variant, AvlDriver, BstDriver, FuzzDriver, RbDriver};
pub use sets::{AvlSet, BstSet, RbSet};
pub use store::{ArrayStore, LinkedStore};
