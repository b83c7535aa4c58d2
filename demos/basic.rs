use urlvalue::UrlValue;

fn main() {
    let mut url = UrlValue::parse("http://test.example.com/test1/test2");

    println!("URL: {}", url.build_url()); // http://test.example.com/test1/test2
    println!("Scheme: {:?}", url.scheme()); // Some("http")
    println!("Host: {}", url.host()); // test.example.com
    println!("Path: {}", url.path()); // /test1/test2

    url.set_force_www(true).set_scheme("https");
    println!("Forced www: {url}"); // https://www.test.example.com/test1/test2

    url.insert_path_after("test1", "test3")
        .insert_path_before("test3", "test4")
        .replace_path("test2", "new")
        .delete_path("test1");
    println!("Edited path: {url}"); // https://www.test.example.com/test4/test3/new

    url.set_fragment("randomHash").set_port(8888);
    println!("With port and fragment: {url}"); // https://www.test.example.com:8888/test4/test3/new#randomHash

    let redirect = url.redirect(302);
    for (name, value) in redirect.headers() {
        println!("{name}: {value}");
    }
}
