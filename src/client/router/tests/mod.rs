mod resolve;
mod user_routes;
