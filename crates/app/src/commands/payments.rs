use bizhub_domain::{CheckoutRequest, CheckoutSession, PaymentRecord, Result as DomainResult};

use super::records::{fill_form, Assignment};
use crate::context::AppContext;
use crate::shell::{FormState, Shell, View};
use crate::utils::command_helpers::execute_command;

pub async fn show_payment(ctx: &AppContext, id: &str) -> DomainResult<PaymentRecord> {
    execute_command("payments::show", || ctx.payments.get(id)).await
}

/// Fill the request-payment form and start a checkout session.
///
/// On success the page location is the checkout URL.
pub async fn request_payment(
    ctx: &AppContext,
    shell: &Shell,
    assignments: &[Assignment],
) -> DomainResult<CheckoutSession> {
    shell.open(View::RequestPayment);
    execute_command("payments::request", || async {
        let mut form = FormState::<CheckoutRequest>::new();
        fill_form(&mut form, assignments)?;
        let request = form.submit()?;

        let session = ctx.checkout.request_payment(&request).await?;
        shell.close_form();
        Ok(session)
    })
    .await
}
