use actix_web::web;

use crate::handlers::contact;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/contact")
            .service(
                web::resource("")
                    .route(web::post().to(contact::create_contact))
                    .route(web::get().to(contact::list_contacts)),
            )
            .service(web::resource("/stats").route(web::get().to(contact::contact_stats)))
            .service(
                web::resource("/{id}/status")
                    .route(web::patch().to(contact::update_contact_status)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(contact::get_contact))
                    .route(web::delete().to(contact::delete_contact)),
            ),
    );
}
