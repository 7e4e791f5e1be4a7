//! Canned API payloads.

use serde_json::{Value, json};

/// Post id used by the single-post fixtures.
pub const POST_ID: u64 = 1;
/// Author id referenced by [`post`].
pub const AUTHOR_ID: u64 = 1;

/// Two posts as returned by `GET /posts`.
#[must_use]
pub fn posts() -> Value {
    json!([
        post(),
        {
            "userId": 2,
            "id": 2,
            "title": "qui est esse",
            "body": "est rerum tempore vitae\nsequi sint nihil reprehenderit"
        }
    ])
}

/// A single post as returned by `GET /posts/1`.
#[must_use]
pub fn post() -> Value {
    json!({
        "userId": AUTHOR_ID,
        "id": POST_ID,
        "title": "sunt aut facere repellat provident",
        "body": "quia et suscipit\nsuscipit recusandae consequuntur"
    })
}

/// A user as returned by `GET /users/1`, including fields the UI ignores.
#[must_use]
pub fn author() -> Value {
    json!({
        "id": AUTHOR_ID,
        "name": "Leanne Graham",
        "username": "Bret",
        "email": "Sincere@april.biz",
        "address": {
            "street": "Kulas Light",
            "city": "Gwenborough",
            "zipcode": "92998-3874"
        },
        "phone": "1-770-736-8031 x56442",
        "website": "hildegard.org"
    })
}

/// Comments as returned by `GET /comments?postId=1`.
#[must_use]
pub fn comments() -> Value {
    json!([
        {
            "postId": POST_ID,
            "id": 1,
            "name": "id labore ex et quam laborum",
            "email": "Eliseo@gardner.biz",
            "body": "laudantium enim quasi est quidem magnam"
        },
        {
            "postId": POST_ID,
            "id": 2,
            "name": "quo vero reiciendis velit similique earum",
            "email": "Jayne_Kuhic@sydney.com",
            "body": "est natus enim nihil est dolore omnis"
        }
    ])
}
