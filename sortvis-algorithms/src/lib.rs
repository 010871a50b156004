#![deny(missing_docs)]
//! The nine sorting algorithms as lazy [`StepProducer`]s, and the fixed
//! [`Registry`] that catalogs them.
//!
//! Each producer is a hand-written state machine over a private copy of the
//! input: every call to `next` performs exactly one comparison or placement
//! and returns its [`Step`]. The recursive sorts keep their recursion as
//! explicit data (a range stack for quick sort, a post-order merge plan for
//! merge sort, a sift cursor for heap sort), so the step order is the same
//! as the textbook recursive version.
//!
//! [`StepProducer`]: sortvis_core::StepProducer
//! [`Step`]: sortvis_core::Step

mod bucket;
mod bubble;
mod counting;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod registry;
mod selection;
mod shell;

pub use bubble::BubbleSort;
pub use counting::CountingSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use radix::RadixSort;
pub use registry::Registry;
pub use selection::SelectionSort;
pub use shell::ShellSort;
