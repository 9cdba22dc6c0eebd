#[actix_web::main]
async fn main() -> std::io::Result<()> {
    filemyrti_portal::run().await
}
