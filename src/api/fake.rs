// In-memory stand-in for the remote user service, used by unit tests

use crate::api::client::UserService;
use crate::core::error::ClientError;
use crate::models::user::{Company, NewUser, User, UserId};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

pub struct FakeUserService {
    users: Mutex<Vec<User>>,
    calls: Mutex<Vec<String>>,
    failing: AtomicBool,
}

impl FakeUserService {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            calls: Mutex::new(Vec::new()),
            failing: AtomicBool::new(false),
        }
    }

    /// Make every following request answer 500
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), ClientError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
        }
        Ok(())
    }
}

impl UserService for FakeUserService {
    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.record("GET /users".to_string())?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        self.record("POST /users".to_string())?;
        let created = User {
            id: user.id.clone(),
            name: user.name.clone(),
            username: user.username.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
            company_name: Some(user.company_name.clone()),
            company: None,
            website: Some(user.website.clone()),
        };
        Ok(created)
    }

    async fn replace_user(&self, id: &UserId, user: &User) -> Result<User, ClientError> {
        self.record(format!("PUT /users/{}", id))?;
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &UserId) -> Result<(), ClientError> {
        self.record(format!("DELETE /users/{}", id))?;
        self.users.lock().unwrap().retain(|u| &u.id != id);
        Ok(())
    }
}

/// Listed record shaped like the remote service's sample data
pub fn sample_user(id: u64, name: &str, city: &str) -> User {
    let mut user: User = serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "username": format!("user{}", id),
        "email": format!("user{}@example.com", id),
        "phone": "1234567890",
        "address": { "street": "Main St", "suite": "Apt. 1", "city": city, "zipcode": "12345" },
        "website": "example.org"
    }))
    .unwrap();
    user.company = Some(Company {
        name: "ACME".to_string(),
        ..Default::default()
    });
    user
}
