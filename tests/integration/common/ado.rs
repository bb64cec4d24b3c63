//! ADO service hook payload helpers

use serde_json::Value;

/// Create a `workitem.commented` payload carrying every link rendering
pub fn create_work_item_commented_payload(work_item_id: u64, comment: &str) -> Value {
    serde_json::json!({
        "subscriptionId": "00000000-0000-0000-0000-000000000000",
        "notificationId": 3,
        "id": "fb2617ed-60df-4518-81fa-749faa6c5cd6",
        "eventType": "workitem.commented",
        "publisherId": "tfs",
        "message": {
            "text": format!("Task #{work_item_id} (Estimate migration) commented on by Jane Doe."),
            "html": format!(
                "<a href=\"https://dev.azure.com/contoso/Platform/_workitems/edit/{work_item_id}?src=html&amp;tab=history\">Task {work_item_id}</a> (Estimate migration) commented on by Jane Doe."
            ),
            "markdown": format!(
                "[Task {work_item_id}](https://dev.azure.com/contoso/Platform/_workitems/edit/{work_item_id}) (Estimate migration) commented on by Jane Doe."
            )
        },
        "detailedMessage": {
            "text": format!("Task #{work_item_id} (Estimate migration) commented on by Jane Doe.\r\n\r\n{comment}\r\n")
        },
        "resource": {
            "id": work_item_id,
            "rev": 12,
            "fields": {
                "System.AreaPath": "Platform",
                "System.TeamProject": "Platform",
                "System.WorkItemType": "Task",
                "System.State": "Active",
                "System.Title": "Estimate migration",
                "System.ChangedBy": {
                    "displayName": "Jane Doe",
                    "uniqueName": "jane@contoso.com"
                },
                "System.History": comment
            },
            "_links": {
                "html": {
                    "href": format!("https://dev.azure.com/contoso/Platform/_workitems/edit/{work_item_id}?src=links")
                }
            },
            "url": format!("https://dev.azure.com/contoso/_apis/wit/workItems/{work_item_id}")
        },
        "resourceContainers": {
            "collection": {"id": "c12d0eb8-e382-443b-9f9c-c52cba5014c2"},
            "project": {"id": "be9b3917-87e6-42a4-a549-2bc06a7a878f", "name": "Platform"}
        },
        "createdDate": "2024-05-02T09:15:30.000Z"
    })
}

/// Same as [`create_work_item_commented_payload`] with every link source removed
pub fn create_work_item_without_links(work_item_id: u64, comment: &str) -> Value {
    let mut payload = create_work_item_commented_payload(work_item_id, comment);
    payload["message"] = serde_json::json!({
        "text": format!("Task #{work_item_id} commented on.")
    });
    if let Some(resource) = payload["resource"].as_object_mut() {
        resource.remove("_links");
        resource.remove("url");
    }
    payload
}

/// Create a generic ADO payload with a specified event type
pub fn create_event_payload(event_type: &str) -> Value {
    serde_json::json!({
        "eventType": event_type,
        "resource": {
            "id": 1,
            "fields": {"System.History": "@Hans"}
        }
    })
}
