use awesome_config::session::DEFAULT_COOKIE_NAME;
use awesome_core::{ErrorBody, PaginationMeta};
use awesome_models::{
    AuthenticateRequest, Blog, BlogDetail, BlogPage, Comment, CreateBlogRequest,
    RegisterUserRequest, User,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::authenticate,
        crate::modules::auth::controller::signout,
        crate::modules::users::controller::register_user,
        crate::modules::blogs::controller::list_blogs,
        crate::modules::blogs::controller::get_blog,
        crate::modules::blogs::controller::create_blog,
    ),
    components(
        schemas(
            User,
            AuthenticateRequest,
            RegisterUserRequest,
            Blog,
            Comment,
            BlogDetail,
            BlogPage,
            CreateBlogRequest,
            PaginationMeta,
            ErrorBody,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Sign in and sign out"),
        (name = "Users", description = "User registration"),
        (name = "Blogs", description = "Blog reading and publishing")
    ),
    info(
        title = "Awesome API",
        version = "0.1.0",
        description = "Blog backend with signed cookie sessions.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_cookie",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(DEFAULT_COOKIE_NAME))),
            )
        }
    }
}
