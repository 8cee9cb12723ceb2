//! Server-rendered page shell: header, routed body, footer.

use serde::Serialize;
use tera::{Context, Tera};

use crate::users::User;

const APP_NAME: &str = "Vacationer";

lazy_static::lazy_static! {
    static ref TERA: Tera = {
        let mut tera = Tera::default();
        // names ending in .html are autoescaped
        tera.add_raw_templates(vec![
            ("base.html", include_str!("templates/base.html")),
            ("header.html", include_str!("templates/header.html")),
            ("footer.html", include_str!("templates/footer.html")),
            ("landing.html", include_str!("templates/landing.html")),
        ])
        .expect("embedded shell templates are valid");
        tera
    };
}

#[derive(Debug, Serialize)]
struct ShellData<'a> {
    app_name: &'a str,
    user_name: Option<&'a str>,
}

/// Renders a shell template for the given (optional) signed-in user.
pub fn render(name: &str, user: Option<&User>) -> tera::Result<String> {
    let data = ShellData {
        app_name: APP_NAME,
        user_name: user.map(|u| u.first_name.as_deref().unwrap_or(&u.email)),
    };
    TERA.render(name, &Context::from_serialize(&data)?)
}

pub fn landing(user: Option<&User>) -> tera::Result<String> {
    render("landing.html", user)
}
