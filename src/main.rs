#[rocket::launch]
fn rocket() -> _ {
    folio::build()
}
