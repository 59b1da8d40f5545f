use rocket::Request;
use rocket_dyn_templates::{Template, context};

#[get("/")]
pub async fn index() -> Template {
    Template::render(
        "login",
        context! {
            title: "Login"
        },
    )
}

#[get("/choose")]
pub async fn choose() -> Template {
    Template::render(
        "choose",
        context! {
            title: "Escolha uma opção"
        },
    )
}

#[get("/home")]
pub async fn home() -> Template {
    Template::render(
        "home",
        context! {
            title: "Upload de patrimônio"
        },
    )
}

#[catch(404)]
pub async fn not_found(req: &Request<'_>) -> Template {
    Template::render(
        "error/404",
        context! {
            title: "Página não encontrada",
            uri: req.uri()
        },
    )
}
