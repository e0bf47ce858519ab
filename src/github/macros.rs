#[macro_export]
macro_rules! get {
    ($client:expr, $url:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $client
            .get($url)
            .default_headers($client.token())
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! post {
    ($client:expr, $url:expr, $body:expr) => {{
        use reqwest::header::CONTENT_TYPE;
        use $crate::http::{Headers, ResponseHandler};

        $client
            .post($url)
            .default_headers($client.token())
            .header(CONTENT_TYPE, "application/json")
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! patch {
    ($client:expr, $url:expr, $body:expr) => {{
        use reqwest::header::CONTENT_TYPE;
        use $crate::http::{Headers, ResponseHandler};

        $client
            .patch($url)
            .default_headers($client.token())
            .header(CONTENT_TYPE, "application/json")
            .body($body)
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! delete {
    ($client:expr, $url:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $client
            .delete($url)
            .default_headers($client.token())
            .send()
            .await
            .handle()
            .await
    }};
}

#[macro_export]
macro_rules! upload_file {
    ($client:expr, $url:expr, $name:expr, $mime:expr, $size:expr, $content:expr) => {{
        use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
        use $crate::http::{Headers, ResponseHandler};

        $client
            .post($url)
            .default_headers($client.token())
            .query(&[("name", $name)])
            .header(CONTENT_TYPE, $mime)
            .header(CONTENT_LENGTH, $size)
            .body($content)
            .send()
            .await
            .handle()
            .await
    }};
}
