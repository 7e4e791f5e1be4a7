use postview_models::{Author, Comment, Post};

use crate::cli::{OutputFormat, PostListArgs, PostShowArgs};
use crate::client::{AppContext, CliResult, endpoint_url};
use crate::output::{PostThread, render_post_list, render_post_thread};

pub(crate) async fn handle_post_list(
    ctx: &AppContext,
    args: PostListArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let posts = fetch_posts(ctx, &args).await?;
    render_post_list(&posts, output)
}

pub(crate) async fn handle_post_show(
    ctx: &AppContext,
    args: PostShowArgs,
    output: OutputFormat,
) -> CliResult<()> {
    let thread = fetch_thread(ctx, args.id).await?;
    render_post_thread(&thread, output)
}

pub(crate) async fn fetch_posts(ctx: &AppContext, args: &PostListArgs) -> CliResult<Vec<Post>> {
    let mut url = endpoint_url(&ctx.endpoints.posts())?;
    if let Some(user) = args.user {
        url.query_pairs_mut()
            .append_pair("userId", &user.to_string());
    }

    let mut posts: Vec<Post> = ctx.get_json(url, "posts").await?;
    if let Some(limit) = args.limit {
        posts.truncate(limit);
    }
    tracing::info!(count = posts.len(), "posts loaded");
    Ok(posts)
}

/// Fetch a post, then its author and comments concurrently.
pub(crate) async fn fetch_thread(ctx: &AppContext, id: u64) -> CliResult<PostThread> {
    let post: Post = ctx
        .get_json(endpoint_url(&ctx.endpoints.post(id))?, &format!("post {id}"))
        .await?;

    let author_url = endpoint_url(&ctx.endpoints.user(post.user_id))?;
    let comments_url = endpoint_url(&ctx.endpoints.comments_for(post.id))?;
    let author_label = format!("author {}", post.user_id);
    let comments_label = format!("comments for post {}", post.id);
    let (author, comments) = tokio::join!(
        ctx.get_json::<Author>(author_url, &author_label),
        ctx.get_json::<Vec<Comment>>(comments_url, &comments_label),
    );

    let thread = PostThread {
        post,
        author: author?,
        comments: comments?,
    };
    tracing::info!(
        post = thread.post.id,
        comments = thread.comments.len(),
        "post thread loaded"
    );
    Ok(thread)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use postview_models::Endpoints;
    use postview_test_support::fixtures;
    use reqwest::Client;

    fn context(server: &MockServer) -> AppContext {
        AppContext {
            client: Client::new(),
            endpoints: Endpoints::new(server.base_url()),
        }
    }

    #[tokio::test]
    async fn post_list_decodes_collection() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/posts");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::posts());
        });

        let posts = fetch_posts(&context(&server), &PostListArgs::default())
            .await
            .expect("posts load");
        mock.assert();
        let ids: Vec<u64> = posts.iter().map(|post| post.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn post_list_applies_user_filter_and_limit() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/posts").query_param("userId", "2");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::posts());
        });

        let args = PostListArgs {
            user: Some(2),
            limit: Some(1),
        };
        let posts = fetch_posts(&context(&server), &args)
            .await
            .expect("posts load");
        mock.assert();
        assert_eq!(posts.len(), 1);
    }

    #[tokio::test]
    async fn post_list_renders_table() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/posts");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::posts());
        });

        handle_post_list(
            &context(&server),
            PostListArgs::default(),
            OutputFormat::Table,
        )
        .await
        .expect("list should succeed");
    }

    #[tokio::test]
    async fn post_show_fetches_author_and_comments() {
        let server = MockServer::start_async().await;
        let post_mock = server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::post());
        });
        let author_mock = server.mock(|when, then| {
            when.method(GET).path("/users/1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::author());
        });
        let comments_mock = server.mock(|when, then| {
            when.method(GET).path("/comments").query_param("postId", "1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::comments());
        });

        let thread = fetch_thread(&context(&server), fixtures::POST_ID)
            .await
            .expect("thread loads");
        post_mock.assert();
        author_mock.assert();
        comments_mock.assert();
        assert_eq!(thread.author.email, "Sincere@april.biz");
        assert_eq!(thread.comments.len(), 2);

        handle_post_show(
            &context(&server),
            PostShowArgs {
                id: fixtures::POST_ID,
            },
            OutputFormat::Json,
        )
        .await
        .expect("show should succeed");
    }

    #[tokio::test]
    async fn missing_post_is_a_validation_error() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/posts/404");
            then.status(404).json_body(serde_json::json!({}));
        });

        let Err(err) = fetch_thread(&context(&server), 404).await else {
            panic!("missing post should fail");
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.display_message(), "post 404 not found");
    }

    #[tokio::test]
    async fn failing_comments_fail_the_thread() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::post());
        });
        server.mock(|when, then| {
            when.method(GET).path("/users/1");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(fixtures::author());
        });
        server.mock(|when, then| {
            when.method(GET).path("/comments");
            then.status(500);
        });

        let Err(err) = fetch_thread(&context(&server), fixtures::POST_ID).await else {
            panic!("comments failure should propagate");
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("comments for post 1"));
    }

    #[tokio::test]
    async fn malformed_payload_is_a_failure() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/posts");
            then.status(200)
                .header("content-type", "application/json")
                .body("{\"not\": \"a list\"}");
        });

        let Err(err) = fetch_posts(&context(&server), &PostListArgs::default()).await else {
            panic!("malformed payload should fail");
        };
        assert_eq!(err.exit_code(), 3);
        assert!(err.display_message().contains("failed to parse posts"));
    }
}
