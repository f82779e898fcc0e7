use actix_web::web;

use crate::handlers::projects;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::post().to(projects::create_project))
                    .route(web::get().to(projects::list_projects)),
            )
            .service(web::resource("/featured").route(web::get().to(projects::featured_projects)))
            .service(web::resource("/stats").route(web::get().to(projects::project_stats)))
            .service(
                web::resource("/category/{category}")
                    .route(web::get().to(projects::projects_by_category)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(projects::get_project))
                    .route(web::patch().to(projects::update_project))
                    .route(web::delete().to(projects::delete_project)),
            ),
    );
}
