pub(crate) mod blogly_service;
