use bizhub_core::{EntityModule, RemoveOutcome};
use bizhub_domain::{EditableResource, FormRecord, Resource, Result as DomainResult};

use crate::shell::{FormState, FormViews, Shell};
use crate::utils::command_helpers::execute_command;

/// One `field=value` assignment from the command line
pub type Assignment = (String, String);

fn command_name<R: Resource>(action: &str) -> String {
    format!("{}::{}", R::COLLECTION_PATH.trim_start_matches("/api/"), action)
}

/// Apply assignments to a form in order; later values win.
pub fn fill_form<F: FormRecord>(
    form: &mut FormState<F>,
    assignments: &[Assignment],
) -> DomainResult<()> {
    for (name, value) in assignments {
        form.set(name, value)?;
    }
    Ok(())
}

pub async fn show_record<R: EditableResource>(
    module: &EntityModule<R>,
    id: &str,
) -> DomainResult<R> {
    execute_command(&command_name::<R>("show"), || module.get(id)).await
}

/// Open the add view, fill the form and submit it.
///
/// A form with an empty required field is rejected before any request is
/// made and the add view stays open.
pub async fn add_record<R>(
    shell: &Shell,
    module: &EntityModule<R>,
    assignments: &[Assignment],
) -> DomainResult<R>
where
    R: EditableResource + FormViews,
{
    shell.open(R::add_view());
    execute_command(&command_name::<R>("add"), || async {
        let mut form = FormState::<R::Form>::new();
        fill_form(&mut form, assignments)?;
        let body = form.submit()?;

        let created = module.create(&body).await?;
        shell.close_form();
        Ok(created)
    })
    .await
}

/// Open the edit view pre-filled from the record, apply the changes and
/// submit.
pub async fn edit_record<R>(
    shell: &Shell,
    module: &EntityModule<R>,
    id: &str,
    assignments: &[Assignment],
) -> DomainResult<()>
where
    R: EditableResource + FormViews,
{
    shell.open(R::edit_view(id));
    execute_command(&command_name::<R>("edit"), || async {
        let existing = match module.cached(id) {
            Some(record) => record,
            None => module.get(id).await?,
        };

        let mut form = FormState::<R::Form>::prefilled(&existing.form_fields());
        fill_form(&mut form, assignments)?;
        let body = form.submit()?;

        module.update(id, &body).await?;
        shell.close_form();
        Ok(())
    })
    .await
}

pub async fn delete_record<R: EditableResource>(
    module: &EntityModule<R>,
    id: &str,
) -> DomainResult<RemoveOutcome> {
    execute_command(&command_name::<R>("delete"), || module.remove(id)).await
}
