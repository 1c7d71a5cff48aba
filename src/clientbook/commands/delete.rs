use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ClientbookError, Result};
use crate::model::Registry;

/// Removes the client with `id`. The id is retired, not recycled.
pub fn run(registry: &mut Registry, id: u64) -> Result<CmdResult> {
    let position = registry
        .clients
        .iter()
        .position(|c| c.id == id)
        .ok_or(ClientbookError::ClientNotFound(id))?;
    let removed = registry.clients.remove(position);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Client removed successfully ({}): {}",
        removed.id, removed.name
    )));
    Ok(result.with_affected_clients(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, list};

    fn seeded() -> Registry {
        let mut registry = Registry::new();
        create::run(&mut registry, "Ana", "86988887777", "Manicure").unwrap();
        create::run(&mut registry, "Bruno", "86999990000", "Pedreiro").unwrap();
        create::run(&mut registry, "Carla", "86911112222", "Manicure").unwrap();
        registry
    }

    #[test]
    fn removes_only_the_matching_client() {
        let mut registry = seeded();
        let result = run(&mut registry, 2).unwrap();
        assert_eq!(result.affected_clients[0].name, "Bruno");

        let names: Vec<_> = list::run(&registry)
            .unwrap()
            .listed_clients
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Carla"]);
    }

    #[test]
    fn keeps_counter_and_remaining_ids() {
        let mut registry = seeded();
        run(&mut registry, 2).unwrap();
        assert_eq!(registry.next_id, 4);
        assert_eq!(registry.clients[1].id, 3);
    }

    #[test]
    fn missing_id_is_not_found() {
        let mut registry = seeded();
        assert!(matches!(
            run(&mut registry, 9),
            Err(ClientbookError::ClientNotFound(9))
        ));
        assert_eq!(registry.clients.len(), 3);
    }

    #[test]
    fn second_delete_of_same_id_is_not_found() {
        let mut registry = seeded();
        run(&mut registry, 1).unwrap();
        assert!(matches!(
            run(&mut registry, 1),
            Err(ClientbookError::ClientNotFound(1))
        ));
    }
}
