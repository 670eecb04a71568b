use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct LoginDto {
    pub email: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub admin: bool,
}
