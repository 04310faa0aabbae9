pub mod core {
    pub mod config;
    pub mod error;
    pub mod routes;
    pub mod state;
    pub mod tracing_init;
}

pub mod models {
    pub mod user;
}

pub mod validation {
    pub mod user;
}

pub mod api {
    pub mod client;

    #[cfg(test)]
    pub(crate) mod fake;
}

pub mod controllers {
    pub mod session;
    pub mod user_form;
    pub mod user_list;
}

pub mod views {
    pub mod home;
    pub mod layout;
    pub mod user_form;
    pub mod user_list;
}

pub mod handlers {
    pub mod fallback;
    pub mod health;
    pub mod home;
    pub mod user_form;
    pub mod user_list;
}
