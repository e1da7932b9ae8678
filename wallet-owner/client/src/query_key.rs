/// Identifies a cached read.  Each distinct search query is cached separately.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum QueryKey {
    All,
    Search(String),
}
