#[allow(unused_macros)]
macro_rules! assert_error {
    ($res:expr, $error:expr) => {{
        assert_eq!($res.status(), $error.status());
        assert_eq!($res.header("content-type"), Some("application/json"));

        let res_json: serde_json::Value = $res.json().await;
        assert_eq!(res_json["error"]["code"], $error.code());
    }};
}

#[allow(unused_imports)]
pub(crate) use assert_error;
