use super::{create_test_service, register_test_user};
use crate::constants::GROUP_CREATED;
use crate::core::errors::DivvyError;
use crate::core::models::Role;

#[tokio::test]
async fn test_create_group_sets_creator_as_owner() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;
    let bob = register_test_user(&service, "Bob").await;

    let group = service
        .create_group("Trip".to_string(), vec![bob.clone(), alice.clone()], &alice)
        .await
        .unwrap();

    assert_eq!(group.name, "Trip");
    assert_eq!(group.members.len(), 2); // creator deduplicated
    assert_eq!(group.members[0].user.id, alice.id);
    assert_eq!(group.members[0].role, Role::Owner);
    assert_eq!(group.members[1].user.id, bob.id);
    assert_eq!(group.members[1].role, Role::Member);

    let audits = service.get_group_audits(&group.id, &alice).await.unwrap();
    assert_eq!(audits.len(), 1);
    assert_eq!(audits[0].action, GROUP_CREATED);
}

#[tokio::test]
async fn test_join_group_by_link() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;
    let carol = register_test_user(&service, "Carol").await;

    let group = service
        .create_group("Flat".to_string(), vec![], &alice)
        .await
        .unwrap();

    let joined = service
        .join_group_by_link(&group.join_link, &carol)
        .await
        .unwrap();
    assert!(joined.is_member(&carol.id));

    let again = service.join_group_by_link(&group.join_link, &carol).await;
    assert!(matches!(again, Err(DivvyError::AlreadyGroupMember(_))));
}

#[tokio::test]
async fn test_unknown_join_link_is_rejected() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;

    let result = service.join_group_by_link("no-such-link", &alice).await;
    assert!(matches!(result, Err(DivvyError::JoinLinkNotFound)));
}

#[tokio::test]
async fn test_regenerate_join_link_invalidates_the_old_one() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;
    let dave = register_test_user(&service, "Dave").await;

    let group = service
        .create_group("Flat".to_string(), vec![], &alice)
        .await
        .unwrap();
    let old_link = group.join_link.clone();

    let new_link = service.regenerate_join_link(&group.id, &alice).await.unwrap();
    assert_ne!(new_link, old_link);

    let via_old = service.join_group_by_link(&old_link, &dave).await;
    assert!(matches!(via_old, Err(DivvyError::JoinLinkNotFound)));
    assert!(service.join_group_by_link(&new_link, &dave).await.is_ok());
}

#[tokio::test]
async fn test_only_owner_can_remove_members() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;
    let bob = register_test_user(&service, "Bob").await;
    let carol = register_test_user(&service, "Carol").await;

    let group = service
        .create_group(
            "Trip".to_string(),
            vec![bob.clone(), carol.clone()],
            &alice,
        )
        .await
        .unwrap();

    let by_member = service
        .remove_member_from_group(&group.id, &carol.id, &bob)
        .await;
    assert!(matches!(by_member, Err(DivvyError::NotGroupOwner(_))));

    service
        .remove_member_from_group(&group.id, &carol.id, &alice)
        .await
        .unwrap();
    let group = service.get_group(&group.id, &alice).await.unwrap();
    assert!(!group.is_member(&carol.id));
}

#[tokio::test]
async fn test_owner_cannot_remove_themselves() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;
    let bob = register_test_user(&service, "Bob").await;

    let group = service
        .create_group("Trip".to_string(), vec![bob], &alice)
        .await
        .unwrap();

    let result = service
        .remove_member_from_group(&group.id, &alice.id, &alice)
        .await;
    assert!(matches!(result, Err(DivvyError::OwnerCannotRemoveSelf)));
}

#[tokio::test]
async fn test_transfer_ownership_swaps_roles() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;
    let bob = register_test_user(&service, "Bob").await;

    let group = service
        .create_group("Trip".to_string(), vec![bob.clone()], &alice)
        .await
        .unwrap();

    service
        .transfer_ownership(&group.id, &bob, &alice)
        .await
        .unwrap();

    let group = service.get_group(&group.id, &alice).await.unwrap();
    assert_eq!(group.owner_id(), Some(bob.id.as_str()));
    let alice_member = group
        .members
        .iter()
        .find(|m| m.user.id == alice.id)
        .unwrap();
    assert_eq!(alice_member.role, Role::Member);
}

#[tokio::test]
async fn test_only_owner_can_delete_group() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;
    let bob = register_test_user(&service, "Bob").await;

    let group = service
        .create_group("Trip".to_string(), vec![bob.clone()], &alice)
        .await
        .unwrap();

    let by_member = service.delete_group(&group.id, &bob).await;
    assert!(matches!(by_member, Err(DivvyError::NotGroupOwner(_))));

    service.delete_group(&group.id, &alice).await.unwrap();
    let gone = service.get_group(&group.id, &alice).await;
    assert!(matches!(gone, Err(DivvyError::GroupNotFound(_))));
}

#[tokio::test]
async fn test_add_member_by_email() {
    let service = create_test_service();
    let alice = register_test_user(&service, "Alice").await;
    let bob = register_test_user(&service, "Bob").await;

    let group = service
        .create_group("Flat".to_string(), vec![], &alice)
        .await
        .unwrap();

    service
        .add_member_by_email(&group.id, "bob@example.com", &alice)
        .await
        .unwrap();
    let group = service.get_group(&group.id, &alice).await.unwrap();
    assert!(group.is_member(&bob.id));

    let missing = service
        .add_member_by_email(&group.id, "nobody@example.com", &alice)
        .await;
    assert!(matches!(missing, Err(DivvyError::UserNotFound(_))));
}
