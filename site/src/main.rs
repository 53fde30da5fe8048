use actix_files::{Files, NamedFile};
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::path::PathBuf;

// Fallback so deep links (e.g. /#projects shared as a bare path) still
// land on the single page.
async fn spa() -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open("../dist/index.html")?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/
    log::info!("serving on http://127.0.0.1:3000");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            // project images and other static assets
            .service(Files::new("/assets", root.join("../assets")))
            // the SPA bundle built by Trunk
            .service(Files::new("/", "../dist").index_file("index.html"))
            .default_service(web::get().to(spa))
    })
    .bind(("127.0.0.1", 3000))?
    .run()
    .await
}
