// reportdesk web front-end entry point (built with trunk)
// Developed by the Reportdesk Team (c)2025

fn main() {
    reportdesk_web::start();
}
