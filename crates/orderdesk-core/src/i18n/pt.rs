pub(super) const MESSAGES: &[(&str, &str)] = &[
    ("login.title", "Bem-vindo de volta"),
    ("login.subtitle", "Digite seu número de telefone para continuar"),
    ("login.phoneLabel", "Número de telefone"),
    ("login.continue", "Continuar"),
    ("auth.errors.invalidFormat", "Número de telefone inválido"),
    ("auth.errors.invalidCredentials", "Credenciais inválidas"),
    ("auth.errors.inProgress", "Já existe um login em andamento"),
    ("auth.errors.storage", "Não foi possível salvar sua sessão"),
    ("dashboard.welcomeBack", "Bem-vindo de volta, {name}"),
    ("dashboard.recentOrders", "Pedidos recentes"),
    ("dashboard.logout", "Sair"),
    ("dashboard.loading", "Carregando…"),
    ("orders.order", "Pedido nº {id}"),
    ("orders.total", "Total"),
    ("orders.notFound", "Pedido não encontrado"),
    ("orders.status.pending", "Pendente"),
    ("orders.status.delivered", "Entregue"),
    ("orders.status.cancelled", "Cancelado"),
    ("orders.classification.gold", "Ouro"),
    ("orders.classification.silver", "Prata"),
    ("orders.classification.bronze", "Bronze"),
    ("speech.memberTier", "Você é um membro {tier}."),
    ("speech.orderNumber", "Pedido número {id}"),
    ("speech.placedOn", "feito em {date}"),
    ("speech.statusIs", "o status é {status}"),
    ("speech.orderDetails", "Detalhes do pedido {id}"),
    ("speech.containsProducts_one", "Este pedido contém {count} produto."),
    ("speech.containsProducts_other", "Este pedido contém {count} produtos."),
    ("speech.totalAmount", "O valor total é {amount} dólares"),
    ("speech.productDetails", "{name}, quantidade {quantity}, {price} dólares"),
    ("speech.products", "Produtos"),
    ("speech.orderCount_one", "Você tem {count} pedido."),
    ("speech.orderCount_other", "Você tem {count} pedidos."),
    ("speech.orderDelivered", "Este pedido foi entregue"),
    ("speech.orderPending", "Este pedido está pendente"),
    ("speech.orderCancelled", "Este pedido foi cancelado"),
    ("navigation.dashboard", "Você está no painel"),
    ("navigation.orderDetails", "Você está vendo os detalhes do pedido"),
    ("navigation.backToDashboard", "Voltando ao painel"),
    ("navigation.login", "Você está na página de login"),
    ("accessibility.speakOrder", "Toque para ouvir os detalhes do pedido"),
    ("accessibility.speakProduct", "Toque para ouvir as informações do produto"),
    ("accessibility.stopSpeaking", "Toque para parar a fala"),
    ("language.title", "Idioma"),
    ("language.changed", "Idioma definido para {language}"),
];
