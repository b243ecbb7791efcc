fn main() {
    env_logger::init();

    println!("giturl parser demo");
    println!("==================");

    let addresses = vec![
        "ssh://foo@githost.example:1234/path/to/git/repo",
        "git://githost.example/path/to/git/repo",
        "https://githost.example:443/path/to/git/repo",
        "git@github.com:dosquad/go-giturl.git",
        "ssh://github.com:1111/~foo/dosquad/go-giturl.git",
        "bar@github.com:~foo/dosquad/go-giturl.git",
        "/path/to/repo.git/",
        "file:///path/to/repo.git/",
        "http://githost.example:99999/repo",
        "notaurl",
    ];

    for raw in addresses {
        println!("\n{} [{}]", raw, giturl::classify(raw));
        match giturl::parse(raw) {
            Ok(url) => {
                println!("  scheme:        {}", url.scheme().unwrap_or("-"));
                println!("  user:          {}", url.username().unwrap_or("-"));
                println!("  host:          {}", url.hostname().unwrap_or("-"));
                println!("  port:          {}", url.port().unwrap_or("-"));
                println!("  path:          {}", url.path());
                println!("  path user:     {}", url.path_username().unwrap_or("-"));
                println!("  path relative: {}", url.path_relative());
                println!("  slug:          {}", url.slug());
            }
            Err(e) => println!("  ✗ Error: {}", e),
        }
    }
}
