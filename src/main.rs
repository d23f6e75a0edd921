mod config;
mod contact;
mod date;
mod navigation;
mod notifications;
mod order;
mod reveal;
mod routes;
mod sections;
mod storage;
mod submission;
mod theme;
mod visibility;

fn main() {
    dioxus::launch(routes::App);
}
