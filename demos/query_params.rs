/// Query parameter usage example
use urlvalue::UrlValue;

fn main() {
    let mut url = UrlValue::parse("https://example.com/search?name=John&age=30");

    // Get values
    println!("name: {:?}", url.query_param("name")); // Some("John")
    println!("age: {:?}", url.query_param("age")); // Some("30")
    println!();

    // Add a new parameter
    url.set_query_param("city", "New York", true);
    println!("After add: {url}"); // https://example.com/search?name=John&age=30&city=New+York

    // Existing keys are kept unless overwrite is set
    url.set_query_param("age", "99", false);
    println!("Without overwrite: {url}"); // ...age=30...
    url.set_query_param("age", "31", true);
    println!("With overwrite: {url}"); // ...age=31...

    // Remove a parameter
    url.remove_query_param("name");
    println!("After remove: {url}"); // https://example.com/search?age=31&city=New+York

    // Replace them all
    url.set_query_params([("q", "rust"), ("page", "2")])
        .expect("keys are unique");
    println!("Replaced: {url}"); // https://example.com/search?q=rust&page=2

    println!("All parameters:");
    for (key, value) in url.query_params().iter() {
        println!("  {key} = {value}");
    }
}
