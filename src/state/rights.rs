//! Page-rights matrix editing.
//!
//! Any capability implies access: switching on insert, update, delete, print
//! or export also switches on access. The row "All" control sets every flag.

#[cfg(test)]
#[path = "rights_test.rs"]
mod rights_test;

use crate::net::types::PageRight;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RightFlag {
    Access,
    Insert,
    Update,
    Delete,
    Print,
    Export,
}

impl RightFlag {
    pub const ALL: [Self; 6] = [Self::Access, Self::Insert, Self::Update, Self::Delete, Self::Print, Self::Export];

    pub fn label(self) -> &'static str {
        match self {
            Self::Access => "View",
            Self::Insert => "Add",
            Self::Update => "Edit",
            Self::Delete => "Delete",
            Self::Print => "Print",
            Self::Export => "Export",
        }
    }

    pub fn get(self, right: &PageRight) -> bool {
        match self {
            Self::Access => right.allow_access,
            Self::Insert => right.allow_insert,
            Self::Update => right.allow_update,
            Self::Delete => right.allow_delete,
            Self::Print => right.allow_print,
            Self::Export => right.allow_export,
        }
    }

    fn set(self, right: &mut PageRight, value: bool) {
        match self {
            Self::Access => right.allow_access = value,
            Self::Insert => right.allow_insert = value,
            Self::Update => right.allow_update = value,
            Self::Delete => right.allow_delete = value,
            Self::Print => right.allow_print = value,
            Self::Export => right.allow_export = value,
        }
    }
}

/// Flip one flag of row `index`. Out-of-range indexes are ignored.
pub fn toggle_flag(rights: &mut [PageRight], index: usize, flag: RightFlag) {
    let Some(right) = rights.get_mut(index) else {
        return;
    };
    let value = !flag.get(right);
    flag.set(right, value);
    if value && flag != RightFlag::Access {
        right.allow_access = true;
    }
}

/// Set every flag of row `index` to `value`.
pub fn set_row(rights: &mut [PageRight], index: usize, value: bool) {
    if let Some(right) = rights.get_mut(index) {
        for flag in RightFlag::ALL {
            flag.set(right, value);
        }
    }
}

/// The row "All" box shows checked when access, insert and delete are set.
pub fn row_all_checked(right: &PageRight) -> bool {
    right.allow_access && right.allow_insert && right.allow_delete
}
