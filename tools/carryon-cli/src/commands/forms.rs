//! Contact, review and login forms.

use anyhow::{bail, Result};
use carryon_commerce::validation::{ContactForm, FieldError, LoginForm, ReviewForm};
use carryon_commerce::CommerceError;

use super::{ContactArgs, LoginArgs, ReviewArgs};
use crate::context::Context;

/// Run the contact command.
pub async fn run_contact(args: ContactArgs, ctx: &Context) -> Result<()> {
    let form = ContactForm {
        name: args.name,
        email: args.email,
        message: args.message,
    };
    report(form.submit(), ctx)
}

/// Run the review command.
pub async fn run_review(args: ReviewArgs, ctx: &Context) -> Result<()> {
    let form = ReviewForm {
        name: args.name,
        email: args.email,
        review: args.review,
    };
    report(form.submit(), ctx)
}

/// Run the login command.
pub async fn run_login(args: LoginArgs, ctx: &Context) -> Result<()> {
    let form = LoginForm {
        email: args.email,
        password: args.password,
    };
    report(form.validate().map(|()| "Signed in."), ctx)
}

fn report(result: Result<&'static str, CommerceError>, ctx: &Context) -> Result<()> {
    match result {
        Ok(message) => {
            if ctx.output.is_json() {
                ctx.output
                    .json(&serde_json::json!({ "ok": true, "message": message }));
            } else {
                ctx.output.success(message);
            }
            Ok(())
        }
        Err(CommerceError::Validation(errors)) => {
            print_field_errors(&errors, ctx);
            bail!("{} field(s) need attention", errors.len())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_field_errors(errors: &[FieldError], ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "ok": false, "errors": errors }));
        return;
    }
    for error in errors {
        ctx.output.warn(&error.to_string());
    }
}
