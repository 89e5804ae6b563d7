//! The configured set of possible checklist items, independent of any
//! single inspection record.

use serde::{Deserialize, Serialize};

use crate::model::{CycleType, ItemFrequency};

/// A checklist item as configured, without user state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub label: String,
    pub frequency: ItemFrequency,
}

impl CatalogItem {
    pub fn new(id: &str, label: &str, frequency: ItemFrequency) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            frequency,
        }
    }
}

/// Returns the catalog items applicable to a cycle, preserving catalog
/// order. Catalog order defines display order.
pub fn filter_catalog(catalog: &[CatalogItem], cycle: CycleType) -> Vec<&CatalogItem> {
    catalog
        .iter()
        .filter(|item| item.frequency.applies_to(cycle))
        .collect()
}

/// The built-in item catalog: 28 daily items and 18 weekly items.
pub fn default_catalog() -> Vec<CatalogItem> {
    let daily: [&str; 28] = [
        "DOCUMENTOS DO VEÍCULO E A FICHA DE COMBUSTÍVEL (CLRV, RIV, FCOMB, FCT)",
        "MANUTENÇÃO DE OPERAÇÃO DIÁRIA E SEMANAL",
        "CONFERIR SELOS DE INSPEÇÃO DE FREIOS E TROCAS DE ÓLEOS",
        "PLANO DE MANUTENÇÃO PREVENTIVA",
        "DOCUMENTAÇÃO DO MOTORISTA",
        "NÍVEL DE ÓLEO DO CARTER, DIREÇÃO HIDRÁULICA, SISTEMA HIDRÁULICO E CÂMBIO AUTOMÁTICO",
        "NÍVEIS DE ÁGUA (COMPLETANDO SE NECESSÁRIO)",
        "NÍVEL DE FLUÍDO DE FREIO",
        "VERIFICAR VAZAMENTOS EM GERAL",
        "ESTADO E TENSÃO DAS CORREIAS",
        "FIXAÇÃO DA BATERIA E RESPECTIVOS BORNES",
        "FUNCIONAR O VEÍCULO, VERIFICANDO BARULHOS ANORMAIS NO MOTOR",
        "FUNCIONAMENTO DOS MARCADORES E ALARMES DO PAINEL (TEMP, ÓLEO, AR FREIO, ETC)",
        "COMANDOS DO ACELERADOR",
        "EMBREAGEM E CÂMBIO/TRANSMISSÃO",
        "FUNCIONAMENTO DOS LIMPADORES DE PÁRA-BRISA E ESTADO DAS PALHETAS",
        "FUNCIONAMENTO DOS FREIOS",
        "SISTEMA ELÉTRICO (LANTERNA, SETA, FAROL, FREIO, EMERGÊNCIA, RÉ, BUZINA)",
        "PORTAS, FECHADURAS E MÁQUINAS DE VIDRO",
        "ESTADO DAS RODAS, PRISIONEIROS E PNEUS (PRESSÃO, DESGASTES E CORTES)",
        "VERIFICAR PNEU SOBRESSALENTE E SUAS CONDIÇÕES (QUANDO HOUVER)",
        "EQUIPAMENTOS OBRIGATÓRIOS (TRIÂNGULO, MACACO, CHAVE DE RODA)",
        "VERIFICAR A CARROCERIA QUANTO À AVARIAS E FIXAÇÃO DE PLACAS",
        "VERIFICAR O ESTADO DO CINTO DE SEGURANÇA",
        "VERIFICAR O ESTADO DO ESTOFAMENTO, DO FORRO E TAPETES",
        "ESPELHOS RETROVISORES INTERNOS E EXTERNOS",
        "EQUIPAMENTOS OPERACIONAIS ESPECÍFICOS (BOMBA, ESCADA, GERADOR, ETC)",
        "COMPLETAR O COMBUSTÍVEL SE NECESSÁRIO",
    ];
    let weekly: [&str; 18] = [
        "REALIZAR INSPEÇÃO CONSTANTE NO CHECK LIST DIÁRIO",
        "CONFERIR SELOS DE TROCA DE ÓLEO E INSPEÇÃO DE FREIOS (DATA E KM VENCIMENTOS)",
        "VERIFICAR O ESTADO E FIXAÇÃO DOS EXTINTORES",
        "EFETUAR LIMPEZA E FIXAÇÃO DOS TERMINAIS DAS BATERIAS",
        "COMPLETAR ÓLEO DA SIRENE BITONAL (2 GOTAS SAE 10W30 A CADA 15 DIAS)",
        "INSPECIONAR PARAFUSOS DAS FLANGES DO CARDAN E ENGRAXAR CRUZETAS",
        "INSPECIONAR AS CINTAS PROTETORAS DO CARDAN",
        "INSPECIONAR MOLAS, AMORTECEDORES, COXINS, COIFAS, CATRACAS E BATENTES",
        "TESTAR VÁLVULA DE DESCARGA AUTOMÁTICA DO RESERVATÓRIO DE AR (SE HOUVER)",
        "DRENAR O DECANTADOR DO ÓLEO DIESEL - DECANTADOR RACCOR (SE NECESSÁRIO)",
        "INSPECIONAR TUBULAÇÕES E MANGUEIRAS DE AR DO FREIO (VAZAMENTOS)",
        "APERTAR PARAFUSOS DA CARROÇARIA, ACESSÓRIOS, PARA-CHOQUE, COXIM E ESCAPE",
        "COMPLETAR ÓLEO LUBRIFICANTE DA BOMBA INJETORA (SE NECESSÁRIO)",
        "VERIFICAR SUPORTE DO MOTOR (TRAVESSA), ANALISANDO DANOS E TRINCAS",
        "INSPECIONAR FIXAÇÃO DA CÂMARA DE FREIOS",
        "TESTAR FUNCIONAMENTO DOS CONJUNTOS IMPLEMENTADOS (CARACTERÍSTICAS OPERACIONAIS)",
        "ATUALIZAR LANÇAMENTOS DE SERVICHOS, PEÇAS E ALTERAÇÕES NO RIV DA VTR",
        "LIMPEZA GERAL DA VIATURA COM APLICAÇÃO DE CERA SILICONE",
    ];

    let mut items = Vec::with_capacity(daily.len() + weekly.len());
    for (i, label) in daily.iter().enumerate() {
        items.push(CatalogItem::new(
            &format!("d{}", i + 1),
            label,
            ItemFrequency::Daily,
        ));
    }
    for (i, label) in weekly.iter().enumerate() {
        items.push(CatalogItem::new(
            &format!("s{}", i + 1),
            label,
            ItemFrequency::Weekly,
        ));
    }
    items
}
