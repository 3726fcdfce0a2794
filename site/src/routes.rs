use actix_files::{Files, NamedFile};
use actix_web::web;
use planup_ui::routes::Page;
use std::path::PathBuf;

#[derive(Clone)]
struct DistDir(PathBuf);

async fn shell(dist: web::Data<DistDir>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open(dist.0.join("index.html"))?)
}

/// Registers the shell routes, `/assets`, `/images` and the Trunk bundle.
///
/// Unknown paths fall through to `Files`, which answers 404.
pub fn configure(dist_dir: PathBuf, assets_dir: PathBuf) -> impl Fn(&mut web::ServiceConfig) + Clone {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(DistDir(dist_dir.clone())));

        // every client page boots from the same shell
        for page in Page::ALL {
            cfg.route(page.path(), web::get().to(shell));
        }

        cfg.service(Files::new("/assets", assets_dir.clone()))
            .service(Files::new("/images", assets_dir.join("images")))
            .service(Files::new("/", dist_dir.clone()));
    }
}
