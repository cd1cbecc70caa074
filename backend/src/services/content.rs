//! Static preparation content: travel tips, checklists and reminders.

use indexmap::IndexMap;

use crate::models::{Category, Checklist};

/// Source of the preparation texts shown with the plan.
pub trait TravelContent: Send + Sync {
    /// Tips for coping with unfamiliar places.
    fn tips(&self) -> Vec<String>;

    /// Packing checklist, grouped by section.
    fn travel_checklist(&self) -> Checklist;

    /// Preparation steps for an event of the given category.
    fn category_checklist(&self, category: Category) -> Vec<String>;

    /// Minutes before an event at which reminders fire, largest first.
    fn reminder_offsets(&self) -> Vec<u32> {
        vec![60, 30, 15, 5]
    }
}

/// The built-in Portuguese content.
#[derive(Debug, Clone, Default)]
pub struct StaticTravelContent;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl TravelContent for StaticTravelContent {
    fn tips(&self) -> Vec<String> {
        owned(&[
            "Prepare uma lista de verificação de viagem com antecedência",
            "Baixe mapas offline da região que vai visitar",
            "Pesquise sobre transporte público ou opções de táxi/Uber no destino",
            "Saia com antecedência extra para compromissos em locais desconhecidos",
            "Salve os endereços importantes no Google Maps antes da viagem",
            "Configure alarmes extras para compromissos importantes",
            "Tenha um plano B para caso se perca ou atrase",
            "Mantenha contatos de emergência facilmente acessíveis",
            "Pratique técnicas de respiração para reduzir ansiedade (4-7-8: inspire por 4s, segure por 7s, expire por 8s)",
            "Lembre-se que é normal sentir-se ansioso em lugares desconhecidos",
        ])
    }

    fn travel_checklist(&self) -> Checklist {
        let mut checklist = IndexMap::new();
        checklist.insert(
            "Documentos".to_string(),
            owned(&[
                "RG/CNH",
                "Cartões de crédito/débito",
                "Seguro viagem (se aplicável)",
                "Passagens e reservas impressas (backup)",
                "Cartão do plano de saúde",
            ]),
        );
        checklist.insert(
            "Tecnologia".to_string(),
            owned(&[
                "Celular e carregador",
                "Notebook e carregador (se necessário)",
                "Adaptadores de tomada",
                "Powerbank",
                "Fones de ouvido",
            ]),
        );
        checklist.insert(
            "Roupas".to_string(),
            owned(&[
                "Verificar previsão do tempo no destino",
                "Roupas adequadas para os compromissos",
                "Roupas confortáveis para deslocamentos",
                "Calçados confortáveis",
            ]),
        );
        checklist.insert(
            "Saúde".to_string(),
            owned(&[
                "Medicamentos de uso contínuo",
                "Analgésicos básicos",
                "Antialérgicos (se necessário)",
                "Máscara facial (opcional)",
            ]),
        );
        checklist
    }

    fn category_checklist(&self, category: Category) -> Vec<String> {
        match category {
            Category::Tattoo => owned(&[
                "Levar documento de identidade",
                "Comer bem antes da sessão",
                "Levar água",
                "Vestir roupas confortáveis",
                "Verificar formas de pagamento",
            ]),
            Category::Child => owned(&[
                "Levar brinquedos/entretenimento",
                "Verificar se há lanches/refeições necessárias",
                "Levar documentos da criança se necessário",
                "Verificar horário de retorno",
            ]),
            Category::Family => owned(&[
                "Verificar se precisa levar algo (comida, bebida, presente)",
                "Confirmar endereço e horário",
                "Avisar se vai atrasar",
            ]),
            Category::Partner => owned(&[
                "Verificar reservas se necessário",
                "Confirmar local e horário",
                "Verificar se precisa levar algo",
            ]),
            Category::Gaming => owned(&[
                "Verificar se equipamentos estão funcionando",
                "Carregar controles/dispositivos",
                "Confirmar com amigos se for jogo em grupo",
            ]),
            Category::Fitness => owned(&[
                "Preparar roupa de treino",
                "Levar garrafa de água",
                "Levar toalha",
                "Verificar horário da academia/treino",
            ]),
            Category::Work => owned(&[
                "Verificar documentos necessários",
                "Preparar apresentações/materiais",
                "Revisar agenda e pontos a discutir",
                "Verificar endereço e sala de reunião",
            ]),
            Category::Trip => owned(&[
                "Verificar documentos (RG, passagens, reservas)",
                "Verificar previsão do tempo no destino",
                "Preparar mala com antecedência",
                "Verificar transporte para o local de partida",
                "Configurar alarmes extras",
                "Verificar rotas e mapas do destino",
            ]),
            Category::Other | Category::Transit => owned(&[
                "Verificar horário e local",
                "Verificar transporte",
                "Preparar materiais necessários",
                "Definir alarme de saída",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_checklist_keeps_section_order() {
        let checklist = StaticTravelContent.travel_checklist();
        let sections: Vec<&str> = checklist.keys().map(|k| k.as_str()).collect();
        assert_eq!(sections, vec!["Documentos", "Tecnologia", "Roupas", "Saúde"]);
        assert!(checklist.values().all(|items| !items.is_empty()));
    }

    #[test]
    fn test_every_category_has_a_checklist() {
        for category in Category::ASSIGNABLE {
            assert!(!StaticTravelContent.category_checklist(category).is_empty());
        }
    }

    #[test]
    fn test_transit_falls_back_to_other() {
        assert_eq!(
            StaticTravelContent.category_checklist(Category::Transit),
            StaticTravelContent.category_checklist(Category::Other)
        );
    }

    #[test]
    fn test_reminder_offsets_descending() {
        let offsets = StaticTravelContent.reminder_offsets();
        assert_eq!(offsets, vec![60, 30, 15, 5]);
    }

    #[test]
    fn test_tips_not_empty() {
        assert_eq!(StaticTravelContent.tips().len(), 10);
    }
}
