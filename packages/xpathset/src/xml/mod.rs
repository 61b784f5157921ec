//! XML utilities over `roxmltree` nodes.

mod utils;

pub use utils::{
    attribute_name, element_children, element_name, has_element_children, is_leaf_element,
};
