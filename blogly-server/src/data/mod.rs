pub(crate) mod post_repository;
pub(crate) mod repositories;
pub(crate) mod tag_repository;
pub(crate) mod user_repository;
