use clap::Parser;
use ctrlhora_core::use_cases::users::create_user::CreateUser;
use ctrlhora_models::NewUser;

use super::write_users;
use crate::{commands::CommandContext, Result};

/// Create a user
#[derive(Parser)]
pub(crate) struct UsersCreateCommand {
    /// Username
    username: String,
    /// Password
    #[arg(long)]
    password: String,
    /// Grant administrator rights
    #[arg(long)]
    admin: bool,
    /// Full name
    #[arg(long)]
    full_name: Option<String>,
    /// Chilean national ID (RUT)
    #[arg(long)]
    rut: Option<String>,
    /// Email address
    #[arg(long)]
    email: Option<String>,
    /// Phone number
    #[arg(long)]
    phone_number: Option<String>,
}

impl UsersCreateCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let user = NewUser {
            username: self.username,
            password: self.password,
            is_admin: self.admin,
            full_name: self.full_name,
            rut: self.rut,
            email: self.email,
            phone_number: self.phone_number,
        };

        let users = CreateUser.run(&ctx.as_core_context(), &user).await?;

        writeln!(ctx.writer.write().await, "User created successfully.")?;
        write_users(&ctx, &users).await
    }
}
