pub(crate) mod pages;
pub(crate) mod posts;
pub(crate) mod tags;
pub(crate) mod users;
