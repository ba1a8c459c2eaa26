use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
use crate::data::tag_repository::{NewTag, TagPatch, TagRepository};
use crate::data::user_repository::{NewUser, UserPatch, UserRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};
use crate::domain::tag::{CreateTagRequest, Tag, UpdateTagRequest};
use crate::domain::user::{CreateUserRequest, DEFAULT_IMAGE_URL, UpdateUserRequest, User};

/// A user together with the posts it owns (user detail page).
#[derive(Debug, Clone)]
pub(crate) struct UserDetails {
    pub(crate) user: User,
    pub(crate) posts: Vec<Post>,
}

/// A post with its author and associated tags (post detail page).
#[derive(Debug, Clone)]
pub(crate) struct PostDetails {
    pub(crate) post: Post,
    pub(crate) author: User,
    pub(crate) tags: Vec<Tag>,
}

/// A tag with the posts it is attached to (tag detail page).
#[derive(Debug, Clone)]
pub(crate) struct TagDetails {
    pub(crate) tag: Tag,
    pub(crate) posts: Vec<Post>,
}

pub(crate) struct BloglyService<U, P, T>
where
    U: UserRepository,
    P: PostRepository,
    T: TagRepository,
{
    users: U,
    posts: P,
    tags: T,
}

impl<U, P, T> BloglyService<U, P, T>
where
    U: UserRepository,
    P: PostRepository,
    T: TagRepository,
{
    pub(crate) fn new(users: U, posts: P, tags: T) -> Self {
        Self { users, posts, tags }
    }

    // Users

    pub(crate) async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.users.list_users().await
    }

    pub(crate) async fn get_user(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .get_user(id)
            .await?
            .ok_or(DomainError::NotFound(format!("user id: {id}")))
    }

    pub(crate) async fn user_details(&self, id: i64) -> Result<UserDetails, DomainError> {
        let user = self.get_user(id).await?;
        let posts = self.posts.list_by_user(id).await?;
        Ok(UserDetails { user, posts })
    }

    pub(crate) async fn create_user(&self, req: CreateUserRequest) -> Result<User, DomainError> {
        let req = req.validate()?;
        let image_url = req
            .image_url
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());
        self.users
            .create_user(NewUser {
                first_name: req.first_name,
                last_name: req.last_name,
                image_url,
            })
            .await
    }

    pub(crate) async fn update_user(
        &self,
        id: i64,
        req: UpdateUserRequest,
    ) -> Result<User, DomainError> {
        let req = req.validate()?;
        let image_url = req
            .image_url
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());
        self.users
            .update_user(
                id,
                UserPatch {
                    first_name: req.first_name,
                    last_name: req.last_name,
                    image_url,
                },
            )
            .await?
            .ok_or(DomainError::NotFound(format!("user id: {id}")))
    }

    pub(crate) async fn delete_user(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self.users.delete_user(id).await?;
        if !deleted {
            return Err(DomainError::NotFound(format!("user id: {id}")));
        }
        Ok(())
    }

    // Posts

    pub(crate) async fn list_posts_recent(&self, limit: i64) -> Result<Vec<Post>, DomainError> {
        self.posts.list_recent(limit).await
    }

    pub(crate) async fn get_post(&self, id: i64) -> Result<Post, DomainError> {
        self.posts
            .get_post(id)
            .await?
            .ok_or(DomainError::NotFound(format!("post id: {id}")))
    }

    pub(crate) async fn post_details(&self, id: i64) -> Result<PostDetails, DomainError> {
        let post = self.get_post(id).await?;
        let author = self.get_user(post.user_id).await?;
        let tags = self.posts.tags_for_post(id).await?;
        Ok(PostDetails { post, author, tags })
    }

    pub(crate) async fn create_post(
        &self,
        user_id: i64,
        req: CreatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;
        self.posts
            .create_post(NewPost {
                title: req.title,
                content: req.content,
                user_id,
                tag_ids: req.tag_ids,
                created_at: None,
            })
            .await
    }

    pub(crate) async fn update_post(
        &self,
        id: i64,
        req: UpdatePostRequest,
    ) -> Result<Post, DomainError> {
        let req = req.validate()?;
        self.posts
            .update_post(
                id,
                PostPatch {
                    title: req.title,
                    content: req.content,
                    tag_ids: req.tag_ids,
                },
            )
            .await?
            .ok_or(DomainError::NotFound(format!("post id: {id}")))
    }

    pub(crate) async fn delete_post(&self, id: i64) -> Result<Post, DomainError> {
        // The deleted post is returned so the caller can redirect to its
        // author and word the confirmation message.
        let post = self.get_post(id).await?;
        let deleted = self.posts.delete_post(id).await?;
        if !deleted {
            return Err(DomainError::NotFound(format!("post id: {id}")));
        }
        Ok(post)
    }

    pub(crate) async fn tags_for_post(&self, post_id: i64) -> Result<Vec<Tag>, DomainError> {
        self.posts.tags_for_post(post_id).await
    }

    pub(crate) async fn posts_for_tag(&self, tag_id: i64) -> Result<Vec<Post>, DomainError> {
        self.posts.posts_for_tag(tag_id).await
    }

    // Tags

    pub(crate) async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
        self.tags.list_tags().await
    }

    pub(crate) async fn get_tag(&self, id: i64) -> Result<Tag, DomainError> {
        self.tags
            .get_tag(id)
            .await?
            .ok_or(DomainError::NotFound(format!("tag id: {id}")))
    }

    pub(crate) async fn tag_details(&self, id: i64) -> Result<TagDetails, DomainError> {
        let tag = self.get_tag(id).await?;
        let posts = self.posts.posts_for_tag(id).await?;
        Ok(TagDetails { tag, posts })
    }

    pub(crate) async fn create_tag(&self, req: CreateTagRequest) -> Result<Tag, DomainError> {
        let req = req.validate()?;
        self.tags.create_tag(NewTag { name: req.name }).await
    }

    pub(crate) async fn update_tag(
        &self,
        id: i64,
        req: UpdateTagRequest,
    ) -> Result<Tag, DomainError> {
        let req = req.validate()?;
        self.tags
            .update_tag(id, TagPatch { name: req.name })
            .await?
            .ok_or(DomainError::NotFound(format!("tag id: {id}")))
    }

    pub(crate) async fn delete_tag(&self, id: i64) -> Result<Tag, DomainError> {
        let tag = self.get_tag(id).await?;
        let deleted = self.tags.delete_tag(id).await?;
        if !deleted {
            return Err(DomainError::NotFound(format!("tag id: {id}")));
        }
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::BloglyService;
    use crate::data::post_repository::{NewPost, PostPatch, PostRepository};
    use crate::data::tag_repository::{NewTag, TagPatch, TagRepository};
    use crate::data::user_repository::{NewUser, UserPatch, UserRepository};
    use crate::domain::error::DomainError;
    use crate::domain::post::{CreatePostRequest, Post, UpdatePostRequest};
    use crate::domain::tag::{CreateTagRequest, Tag};
    use crate::domain::user::{CreateUserRequest, DEFAULT_IMAGE_URL, User};

    #[derive(Clone, Default)]
    struct FakeUserRepo {
        created_input: Arc<Mutex<Option<NewUser>>>,
        user_for_get: Arc<Mutex<Option<User>>>,
        update_result: Arc<Mutex<Option<User>>>,
        delete_result: Arc<Mutex<bool>>,
        list_result: Arc<Mutex<Vec<User>>>,
    }

    #[async_trait]
    impl UserRepository for FakeUserRepo {
        async fn list_users(&self) -> Result<Vec<User>, DomainError> {
            Ok(self.list_result.lock().expect("list_result mutex poisoned").clone())
        }

        async fn get_user(&self, _id: i64) -> Result<Option<User>, DomainError> {
            Ok(self
                .user_for_get
                .lock()
                .expect("user_for_get mutex poisoned")
                .clone())
        }

        async fn create_user(&self, input: NewUser) -> Result<User, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(sample_user(1, &input.first_name, &input.last_name, &input.image_url))
        }

        async fn update_user(
            &self,
            _id: i64,
            _patch: UserPatch,
        ) -> Result<Option<User>, DomainError> {
            Ok(self
                .update_result
                .lock()
                .expect("update_result mutex poisoned")
                .clone())
        }

        async fn delete_user(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(*self.delete_result.lock().expect("delete_result mutex poisoned"))
        }
    }

    #[derive(Clone, Default)]
    struct FakePostRepo {
        created_input: Arc<Mutex<Option<NewPost>>>,
        post_for_get: Arc<Mutex<Option<Post>>>,
        update_call: Arc<Mutex<Option<(i64, PostPatch)>>>,
        update_result: Arc<Mutex<Option<Post>>>,
        delete_result: Arc<Mutex<bool>>,
        list_result: Arc<Mutex<Vec<Post>>>,
        tags_result: Arc<Mutex<Vec<Tag>>>,
    }

    #[async_trait]
    impl PostRepository for FakePostRepo {
        async fn list_recent(&self, _limit: i64) -> Result<Vec<Post>, DomainError> {
            Ok(self.list_result.lock().expect("list_result mutex poisoned").clone())
        }

        async fn list_by_user(&self, _user_id: i64) -> Result<Vec<Post>, DomainError> {
            Ok(self.list_result.lock().expect("list_result mutex poisoned").clone())
        }

        async fn get_post(&self, _id: i64) -> Result<Option<Post>, DomainError> {
            Ok(self
                .post_for_get
                .lock()
                .expect("post_for_get mutex poisoned")
                .clone())
        }

        async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(sample_post(1, &input.title, &input.content, input.user_id))
        }

        async fn update_post(
            &self,
            id: i64,
            patch: PostPatch,
        ) -> Result<Option<Post>, DomainError> {
            *self.update_call.lock().expect("update_call mutex poisoned") = Some((id, patch));
            Ok(self
                .update_result
                .lock()
                .expect("update_result mutex poisoned")
                .clone())
        }

        async fn delete_post(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(*self.delete_result.lock().expect("delete_result mutex poisoned"))
        }

        async fn tags_for_post(&self, _post_id: i64) -> Result<Vec<Tag>, DomainError> {
            Ok(self.tags_result.lock().expect("tags_result mutex poisoned").clone())
        }

        async fn posts_for_tag(&self, _tag_id: i64) -> Result<Vec<Post>, DomainError> {
            Ok(self.list_result.lock().expect("list_result mutex poisoned").clone())
        }
    }

    #[derive(Clone, Default)]
    struct FakeTagRepo {
        created_input: Arc<Mutex<Option<NewTag>>>,
        create_error: Arc<Mutex<Option<String>>>,
        tag_for_get: Arc<Mutex<Option<Tag>>>,
        update_result: Arc<Mutex<Option<Tag>>>,
        delete_result: Arc<Mutex<bool>>,
        list_result: Arc<Mutex<Vec<Tag>>>,
    }

    #[async_trait]
    impl TagRepository for FakeTagRepo {
        async fn list_tags(&self) -> Result<Vec<Tag>, DomainError> {
            Ok(self.list_result.lock().expect("list_result mutex poisoned").clone())
        }

        async fn get_tag(&self, _id: i64) -> Result<Option<Tag>, DomainError> {
            Ok(self
                .tag_for_get
                .lock()
                .expect("tag_for_get mutex poisoned")
                .clone())
        }

        async fn create_tag(&self, input: NewTag) -> Result<Tag, DomainError> {
            if let Some(constraint) = self
                .create_error
                .lock()
                .expect("create_error mutex poisoned")
                .clone()
            {
                return Err(DomainError::ConstraintViolation(constraint));
            }
            *self
                .created_input
                .lock()
                .expect("created_input mutex poisoned") = Some(input.clone());
            Ok(Tag::new(1, input.name).expect("sample tag must be valid"))
        }

        async fn update_tag(
            &self,
            _id: i64,
            _patch: TagPatch,
        ) -> Result<Option<Tag>, DomainError> {
            Ok(self
                .update_result
                .lock()
                .expect("update_result mutex poisoned")
                .clone())
        }

        async fn delete_tag(&self, _id: i64) -> Result<bool, DomainError> {
            Ok(*self.delete_result.lock().expect("delete_result mutex poisoned"))
        }
    }

    fn service(
        users: FakeUserRepo,
        posts: FakePostRepo,
        tags: FakeTagRepo,
    ) -> BloglyService<FakeUserRepo, FakePostRepo, FakeTagRepo> {
        BloglyService::new(users, posts, tags)
    }

    fn sample_user(id: i64, first: &str, last: &str, image_url: &str) -> User {
        User::new(id, first, last, image_url).expect("sample user must be valid")
    }

    fn sample_post(id: i64, title: &str, content: &str, user_id: i64) -> Post {
        Post::new(id, title, content, user_id, Utc::now()).expect("sample post must be valid")
    }

    #[tokio::test]
    async fn create_user_fills_in_default_image() {
        let users = FakeUserRepo::default();
        let svc = service(users.clone(), FakePostRepo::default(), FakeTagRepo::default());

        let created = svc
            .create_user(CreateUserRequest {
                first_name: " Jane ".to_string(),
                last_name: "Doe".to_string(),
                image_url: None,
            })
            .await
            .expect("create_user must succeed");

        assert_eq!(created.full_name(), "Jane Doe");

        let input = users
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(input.first_name, "Jane");
        assert_eq!(input.image_url, DEFAULT_IMAGE_URL);
    }

    #[tokio::test]
    async fn get_user_returns_not_found_when_missing() {
        let svc = service(
            FakeUserRepo::default(),
            FakePostRepo::default(),
            FakeTagRepo::default(),
        );

        let err = svc.get_user(42).await.expect_err("user must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_user_maps_unresolved_id_to_not_found() {
        let users = FakeUserRepo::default();
        *users
            .delete_result
            .lock()
            .expect("delete_result mutex poisoned") = false;
        let svc = service(users, FakePostRepo::default(), FakeTagRepo::default());

        let err = svc.delete_user(7).await.expect_err("delete must fail");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn create_post_passes_tag_ids_through() {
        let posts = FakePostRepo::default();
        let svc = service(FakeUserRepo::default(), posts.clone(), FakeTagRepo::default());

        let req = CreatePostRequest {
            title: "  First!  ".to_string(),
            content: "body".to_string(),
            tag_ids: vec![2, 3],
        };
        let created = svc.create_post(5, req).await.expect("create must succeed");
        assert_eq!(created.title, "First!");

        let input = posts
            .created_input
            .lock()
            .expect("created_input mutex poisoned")
            .clone()
            .expect("repo input must be captured");
        assert_eq!(input.user_id, 5);
        assert_eq!(input.tag_ids, vec![2, 3]);
        assert!(input.created_at.is_none());
    }

    #[tokio::test]
    async fn update_post_replaces_tag_set_via_patch() {
        let posts = FakePostRepo::default();
        *posts
            .update_result
            .lock()
            .expect("update_result mutex poisoned") = Some(sample_post(7, "new", "body", 5));
        let svc = service(FakeUserRepo::default(), posts.clone(), FakeTagRepo::default());

        let req = UpdatePostRequest {
            title: "new".to_string(),
            content: "body".to_string(),
            tag_ids: vec![3, 4],
        };
        let updated = svc.update_post(7, req).await.expect("update must succeed");
        assert_eq!(updated.id, 7);

        let (id, patch) = posts
            .update_call
            .lock()
            .expect("update_call mutex poisoned")
            .clone()
            .expect("update call must be captured");
        assert_eq!(id, 7);
        assert_eq!(patch.tag_ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn update_post_returns_not_found_when_missing() {
        let svc = service(
            FakeUserRepo::default(),
            FakePostRepo::default(),
            FakeTagRepo::default(),
        );

        let req = UpdatePostRequest {
            title: "t".to_string(),
            content: "c".to_string(),
            tag_ids: vec![],
        };
        let err = svc.update_post(9, req).await.expect_err("post must be missing");
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_post_returns_the_removed_post() {
        let posts = FakePostRepo::default();
        *posts
            .post_for_get
            .lock()
            .expect("post_for_get mutex poisoned") = Some(sample_post(7, "bye", "body", 3));
        *posts
            .delete_result
            .lock()
            .expect("delete_result mutex poisoned") = true;
        let svc = service(FakeUserRepo::default(), posts, FakeTagRepo::default());

        let deleted = svc.delete_post(7).await.expect("delete must succeed");
        assert_eq!(deleted.user_id, 3);
        assert_eq!(deleted.title, "bye");
    }

    #[tokio::test]
    async fn post_details_collects_author_and_tags() {
        let users = FakeUserRepo::default();
        *users
            .user_for_get
            .lock()
            .expect("user_for_get mutex poisoned") =
            Some(sample_user(3, "Jane", "Doe", DEFAULT_IMAGE_URL));

        let posts = FakePostRepo::default();
        *posts
            .post_for_get
            .lock()
            .expect("post_for_get mutex poisoned") = Some(sample_post(7, "t", "c", 3));
        *posts.tags_result.lock().expect("tags_result mutex poisoned") =
            vec![Tag::new(1, "fun").expect("tag must be valid")];

        let svc = service(users, posts, FakeTagRepo::default());
        let details = svc.post_details(7).await.expect("details must resolve");

        assert_eq!(details.author.full_name(), "Jane Doe");
        assert_eq!(details.tags.len(), 1);
        assert_eq!(details.tags[0].name, "fun");
    }

    #[tokio::test]
    async fn create_tag_propagates_constraint_violation() {
        let tags = FakeTagRepo::default();
        *tags
            .create_error
            .lock()
            .expect("create_error mutex poisoned") = Some("tags_name_key".to_string());
        let svc = service(FakeUserRepo::default(), FakePostRepo::default(), tags);

        let err = svc
            .create_tag(CreateTagRequest {
                name: "fun".to_string(),
            })
            .await
            .expect_err("duplicate name must fail");
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn delete_tag_returns_the_removed_tag() {
        let tags = FakeTagRepo::default();
        *tags.tag_for_get.lock().expect("tag_for_get mutex poisoned") =
            Some(Tag::new(2, "old").expect("tag must be valid"));
        *tags
            .delete_result
            .lock()
            .expect("delete_result mutex poisoned") = true;
        let svc = service(FakeUserRepo::default(), FakePostRepo::default(), tags);

        let deleted = svc.delete_tag(2).await.expect("delete must succeed");
        assert_eq!(deleted.name, "old");
    }
}
