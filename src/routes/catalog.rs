use axum::Json;

use crate::catalog::{Service, ServiceEntry, Testimonial, TESTIMONIALS};

pub async fn services() -> Json<Vec<ServiceEntry>> {
    Json(Service::ALL.into_iter().map(ServiceEntry::from).collect())
}

pub async fn testimonials() -> Json<&'static [Testimonial]> {
    Json(&TESTIMONIALS[..])
}
