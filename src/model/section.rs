use serde::Serialize;

/// A region of the gosubet page grouping matches by status.
///
/// The display form is the heading text the section is located by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum_macros::Display)]
pub enum Section {
    Live,
    Upcoming,
    Recent,
}
